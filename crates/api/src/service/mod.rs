//! Application services orchestrating the domain core and the storage
//! layer. The read side resolves criteria and not-found semantics; the
//! write side owns uniqueness and the optimistic-concurrency protocol.

pub mod film_read;
pub mod film_write;

pub use film_read::FilmReadService;
pub use film_write::FilmWriteService;
