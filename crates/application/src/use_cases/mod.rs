pub mod dns;

pub use dns::ResolveNameUseCase;
