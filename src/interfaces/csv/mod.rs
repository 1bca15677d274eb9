//! CSV surface of the batch authorizer: requests in, outcome rows out.

pub mod outcome_writer;
pub mod request_reader;
