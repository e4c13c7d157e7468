pub mod growth;
pub mod loan;
pub mod planning;
pub mod retirement;
pub mod tax;
