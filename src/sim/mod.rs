pub(crate) mod body;
pub(crate) mod initial_parameters;
pub(crate) mod system;
pub(crate) mod trajectory;
pub(crate) mod units;
pub(crate) mod vector;
