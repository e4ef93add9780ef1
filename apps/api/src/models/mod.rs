pub mod career;
pub mod roadmap;
