mod memory;

pub use memory::MemoryOrderStore;
