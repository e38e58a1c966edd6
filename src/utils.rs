mod saturating_multiply;
pub use saturating_multiply::saturating_multiply;
