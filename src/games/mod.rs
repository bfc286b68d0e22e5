pub mod mnk;
mod mnk_sets;
pub mod nim;
