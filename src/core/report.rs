//! Report generation
//!
//! A pure aggregation over current catalog and user state producing the
//! formatted report text. Writing the text anywhere is the caller's
//! concern; this module only composes the string.
//!
//! The report has four ordered sections: a header, the per-genre book
//! summary with the catalog total, the list of currently checked-out books,
//! and the borrowers with their outstanding fees plus the grand total due.
//! All counting goes through the engine's search primitive.

use crate::core::catalog::LibraryCatalog;
use crate::types::User;
use rust_decimal::Decimal;

/// The fixed genre vocabulary the summary reports on
///
/// Stored as text on the books, not a closed enum: a genre absent from the
/// catalog reports a zero count, and a book with an unrecognized genre
/// counts toward the catalog total but toward no listed line.
pub const GENRES: [&str; 5] = [
    "Adventure",
    "Fiction",
    "Classics",
    "Mystery",
    "Science Fiction",
];

/// Tab runs that line each genre label up with the AMOUNT column
const GENRE_COLUMNS: [(&str, &str); 5] = [
    ("Adventure", "\t\t\t\t\t"),
    ("Fiction", "\t\t\t\t\t\t"),
    ("Classics", "\t\t\t\t\t"),
    ("Mystery", "\t\t\t\t\t\t"),
    ("Science Fiction", "\t\t\t\t\t"),
];

const SEPARATOR: &str = "====================================================\n";

/// Compose the library report over the engine's current state
///
/// # Arguments
///
/// * `library` - The catalog engine to report on
///
/// # Returns
///
/// The complete report text, ready for the caller to persist
pub fn generate_report(library: &LibraryCatalog) -> String {
    let mut output = String::from("\t\t\t\tREPORT\n\n");

    // Section: per-genre summary and total book count
    output.push_str("\t\tSUMMARY OF BOOKS\n");
    output.push_str("GENRE\t\t\t\t\t\tAMOUNT\n");
    for (genre, tabs) in GENRE_COLUMNS {
        let count = library.search_for_books(|book| book.genre == genre).len();
        output.push_str(&format!("{}{}{}\n", genre, tabs, count));
    }
    output.push_str(SEPARATOR);
    output.push_str(&format!(
        "\t\t\tTOTAL AMOUNT OF BOOKS\t{}\n\n",
        library.books().len()
    ));

    // Section: currently checked-out books, in catalog order
    output.push_str("\t\t\tBOOKS CURRENTLY CHECKED OUT\n\n");
    let checked_out = library.search_for_books(|book| book.checked_out);
    for handle in checked_out.iter() {
        output.push_str(&format!("{}\n", handle.borrow()));
    }
    output.push_str(SEPARATOR);
    output.push_str(&format!(
        "\t\t\tTOTAL AMOUNT OF BOOKS\t{}\n\n",
        checked_out.len()
    ));

    // Section: borrowers and their outstanding fees
    output.push_str("\n\n\t\tUSERS THAT OWE BOOK FEES\n\n");
    let today = library.config().today;
    let borrowers = library.search_for_users(User::has_checked_out_books);

    let mut total_due = Decimal::ZERO;
    for user in borrowers.iter() {
        let fees = user.total_fees(today);
        total_due += fees;
        output.push_str(&format!("{}\t\t\t\t\t${:.2}\n", user.name, fees));
    }
    output.push_str(SEPARATOR);
    output.push_str(&format!("\t\t\t\tTOTAL DUE\t${:.2}\n\n\n", total_due));
    output.push_str("\n\n");

    output
}
