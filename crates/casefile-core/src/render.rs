//! HTML fragments for query results and answer feedback.
//!
//! Every piece of player- or engine-supplied text passes through
//! [`escape_html`] before it is placed in markup.

use crate::{
  sandbox::{EMPTY_QUERY, QueryResult},
  session::{Outcome, SubmitResult},
};

/// Escape the five HTML-significant characters.
pub fn escape_html(text: &str) -> String {
  let mut out = String::with_capacity(text.len());
  for c in text.chars() {
    match c {
      '&' => out.push_str("&amp;"),
      '<' => out.push_str("&lt;"),
      '>' => out.push_str("&gt;"),
      '"' => out.push_str("&quot;"),
      '\'' => out.push_str("&#039;"),
      _ => out.push(c),
    }
  }
  out
}

/// Render a query result for the output pane.
pub fn render_query_result(result: &QueryResult) -> String {
  match result {
    QueryResult::Tabular { columns, rows } => {
      let mut html = String::from("<table><thead><tr>");
      for col in columns {
        html.push_str("<th>");
        html.push_str(&escape_html(col));
        html.push_str("</th>");
      }
      html.push_str("</tr></thead><tbody>");
      for row in rows {
        html.push_str("<tr>");
        for cell in row {
          html.push_str("<td>");
          html.push_str(&escape_html(cell));
          html.push_str("</td>");
        }
        html.push_str("</tr>");
      }
      html.push_str("</tbody></table>");
      html
    }
    QueryResult::Empty => {
      r#"<div class="success-message">Query executed successfully (0 rows returned)</div>"#
        .to_owned()
    }
    QueryResult::Rejected { reason } if reason == EMPTY_QUERY => {
      r#"<div class="error-message">Please enter a query</div>"#.to_owned()
    }
    QueryResult::Rejected { .. } => {
      r#"<div class="error-message">Security Alert: Only SELECT queries are allowed in this game!</div>"#
        .to_owned()
    }
    QueryResult::EngineError { message } => {
      format!(r#"<div class="error-message">Error: {}</div>"#, escape_html(message))
    }
  }
}

/// The feedback line shown under a question. Empty for ignored input.
pub fn feedback_text(result: &SubmitResult) -> &'static str {
  match result.outcome {
    Outcome::Ignored => "",
    Outcome::RejectedMultiWord => "Only ONE WORD allowed! No spaces permitted.",
    Outcome::CorrectFirstTime | Outcome::CorrectRepeat => "Correct! +5 points",
    Outcome::Incorrect => "Incorrect. Try again! -1 point",
  }
}

/// Render the feedback line as markup, or nothing for ignored input.
pub fn render_feedback(result: &SubmitResult) -> String {
  let class = match result.outcome {
    Outcome::Ignored => return String::new(),
    Outcome::CorrectFirstTime | Outcome::CorrectRepeat => "correct",
    Outcome::RejectedMultiWord | Outcome::Incorrect => "incorrect",
  };
  format!(r#"<div class="feedback {class}">{}</div>"#, feedback_text(result))
}
