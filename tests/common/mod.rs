//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use tabula::config::GridConfig;
use tabula::grid::{shape_rows, Column, Row};
use tabula::messages::Msg;
use tabula::model::AppModel;
use tabula::notifications::{Notification, NotificationSink};
use tabula::update::update;

/// Header plus three books; rows 0 and 2 are Fiction
pub const BOOKS_CSV: &str = "Title,Author,Genre,PublishedYear,ISBN\n\
                             Dune,Frank Herbert,Fiction,1965,9780441013593\n\
                             Emma,Jane Austen,Romance,1815,9780141439587\n\
                             Beloved,Toni Morrison,Fiction,1987,9781400033416\n";

/// Shape literal records into rows with sequential ids
pub fn books(records: &[[&str; 5]]) -> Vec<Row> {
    shape_rows(records.iter().map(|r| r.map(String::from)))
}

/// The three books from [`BOOKS_CSV`]
pub fn three_books() -> Vec<Row> {
    books(&[
        ["Dune", "Frank Herbert", "Fiction", "1965", "9780441013593"],
        ["Emma", "Jane Austen", "Romance", "1815", "9780141439587"],
        [
            "Beloved",
            "Toni Morrison",
            "Fiction",
            "1987",
            "9781400033416",
        ],
    ])
}

/// `n` distinct rows, titled `Book 00000` upwards
pub fn numbered_rows(n: usize) -> Vec<Row> {
    shape_rows((0..n).map(|i| {
        [
            format!("Book {i:05}"),
            format!("Author {}", i % 13),
            if i % 3 == 0 { "Fiction" } else { "History" }.to_string(),
            (1950 + i % 75).to_string(),
            format!("{:013}", i),
        ]
    }))
}

/// Create a test model with default config and the given rows loaded
pub fn test_model(rows: Vec<Row>) -> AppModel {
    let mut model = AppModel::new(GridConfig::default());
    model.grid.load(rows);
    model
}

/// Run a message through update, discarding the command
pub fn send(model: &mut AppModel, msg: impl Into<Msg>) {
    let _ = update(model, msg.into());
}

/// Titles of the current view, in display order
pub fn view_titles(model: &AppModel) -> Vec<String> {
    model
        .view()
        .rows
        .iter()
        .map(|r| r.get(Column::Title).to_string())
        .collect()
}

/// Notification sink that keeps everything it receives
#[derive(Debug, Default)]
pub struct RecordingSink {
    pub seen: Vec<Notification>,
}

impl NotificationSink for RecordingSink {
    fn notify(&mut self, notification: Notification) {
        self.seen.push(notification);
    }
}
