pub mod geography;
pub mod income;
pub mod industry;
pub mod sources;
