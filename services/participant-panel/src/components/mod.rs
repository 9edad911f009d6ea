pub mod attendee_rows;
pub mod available_selector;
pub mod participant_row;
