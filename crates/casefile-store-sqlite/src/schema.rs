//! Schema and seed rows for "The Missing Trophy".
//!
//! Applied once by [`crate::SqliteDataset`] during initialization. The
//! connection is switched to `query_only` afterwards.

/// Table definitions. `movements` references `people` and `locations`.
pub const SCHEMA: &str = "
PRAGMA foreign_keys = ON;

CREATE TABLE people (
    id   INTEGER PRIMARY KEY,
    name TEXT NOT NULL,
    role TEXT NOT NULL
);

CREATE TABLE locations (
    id    INTEGER PRIMARY KEY,
    place TEXT NOT NULL
);

CREATE TABLE movements (
    person_id INTEGER,
    place_id  INTEGER,
    time      TEXT NOT NULL,
    FOREIGN KEY (person_id) REFERENCES people(id),
    FOREIGN KEY (place_id)  REFERENCES locations(id)
);

CREATE TABLE clues (
    id          INTEGER PRIMARY KEY,
    description TEXT NOT NULL
);
";

/// The fixed case data.
pub const SEED: &str = "
INSERT INTO people (id, name, role) VALUES
    (1, 'Rahul', 'student'),
    (2, 'Aisha', 'student'),
    (3, 'Kabir', 'volunteer'),
    (4, 'Neha',  'teacher'),
    (5, 'Rohan', 'guard');

INSERT INTO locations (id, place) VALUES
    (1, 'Hall'),
    (2, 'Stage'),
    (3, 'Storage Room'),
    (4, 'Gate');

INSERT INTO movements (person_id, place_id, time) VALUES
    (1, 1, '18:00'),
    (2, 2, '18:05'),
    (3, 3, '18:10'),
    (4, 1, '18:15'),
    (5, 4, '18:20'),
    (1, 3, '18:25');

INSERT INTO clues (id, description) VALUES
    (1, 'Trophy was last seen at Stage'),
    (2, 'Only volunteers had storage access'),
    (3, 'Theft happened after 18:05');
";

/// Run after seeding; any later write fails inside the engine.
pub const LOCK: &str = "PRAGMA query_only = ON;";
