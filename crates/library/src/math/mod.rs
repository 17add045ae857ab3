pub mod casting;
pub mod ceil_div;
pub mod safe_math;
