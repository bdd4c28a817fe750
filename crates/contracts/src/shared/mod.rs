pub mod coalesce;
pub mod date;
