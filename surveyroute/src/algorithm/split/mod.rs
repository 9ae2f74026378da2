mod work_split;

pub use work_split::split_evenly;
