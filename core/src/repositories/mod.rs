pub mod principal;

pub use principal::PrincipalRepository;
