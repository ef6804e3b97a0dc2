// TabStash state managers
// Managers own persisted state: the stash records and their index.

pub mod stash_manager;
