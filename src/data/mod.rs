pub mod crossings;
pub mod table;
pub mod trace_look;
