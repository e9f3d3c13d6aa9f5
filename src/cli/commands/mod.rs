//! CLI command implementations
//!
//! This module contains all CLI command implementations.

pub mod import;
pub mod init;
pub mod list;
pub mod validate;

use crate::domain::Pos;

/// Print a POS record in the human-readable CLI format
pub(crate) fn print_pos(pos: &Pos) {
    let id = pos
        .id
        .map(|id| id.to_string())
        .unwrap_or_else(|| "-".to_string());
    let campus = pos.campus.map(|c| c.as_str()).unwrap_or("-");

    println!("  [{id}] {}", pos.name);
    println!("      Type:        {}", pos.pos_type);
    println!("      Campus:      {campus}");
    println!(
        "      Address:     {} {}, {} {}",
        pos.street, pos.house_number, pos.postal_code, pos.city
    );
    println!("      Description: {}", pos.description);
}
