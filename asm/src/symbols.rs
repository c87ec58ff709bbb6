use arch::reg::PREDEFINED;
use indexmap::IndexMap;

/// First address handed out to variables.
pub const VAR_BASE: u16 = 16;

/// Name -> address map, seeded with the predefined symbols. Labels land here
/// during the first pass, variables during the second.
pub struct Symbols {
    table: IndexMap<String, u16>,
    next_var: u16,
}

impl Symbols {
    pub fn new() -> Self {
        let mut table = IndexMap::new();
        for (name, addr) in PREDEFINED {
            table.insert(name.to_string(), addr);
        }
        Symbols {
            table,
            next_var: VAR_BASE,
        }
    }

    /// Binds `name` to `addr` unless it is already bound; the first binding
    /// wins and is never overwritten.
    pub fn bind(&mut self, name: &str, addr: u16) {
        self.table.entry(name.to_string()).or_insert(addr);
    }

    pub fn get(&self, name: &str) -> Option<u16> {
        self.table.get(name).copied()
    }

    /// Looks `name` up, allocating the next free variable slot on first use.
    pub fn resolve_or_alloc(&mut self, name: &str) -> u16 {
        if let Some(addr) = self.get(name) {
            return addr;
        }
        let addr = self.next_var;
        self.table.insert(name.to_string(), addr);
        self.next_var += 1;
        addr
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Entries in insertion order: predefined first, then labels, then
    /// variables as they were first referenced.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u16)> {
        self.table.iter().map(|(name, addr)| (name.as_str(), *addr))
    }
}

impl Default for Symbols {
    fn default() -> Self {
        Symbols::new()
    }
}
