pub mod fixtures;
pub mod logging;
pub mod test_doubles;
