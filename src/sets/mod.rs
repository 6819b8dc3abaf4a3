pub mod external;
pub mod test_set;
