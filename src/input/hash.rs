/// FNV-1a, 64-bit.
pub struct Fnv64 {
    hash: u64,
}

impl Fnv64 {
    pub fn new() -> Self {
        Self {
            hash: 0xcbf29ce484222325,
        }
    }

    pub fn update(&mut self, data: &[u8]) {
        let mut h = self.hash;
        for &b in data {
            h ^= b as u64;
            h = h.wrapping_mul(0x100000001b3);
        }
        self.hash = h;
    }

    pub fn finish(&self) -> u64 {
        self.hash
    }
}

impl Default for Fnv64 {
    fn default() -> Self {
        Self::new()
    }
}

pub fn hash_bytes(data: &[u8]) -> u64 {
    let mut hasher = Fnv64::new();
    hasher.update(data);
    hasher.finish()
}

/// `{prefix}_XXXXXXXX` from the leading 32 bits of the input hash.
pub fn derive_patient_id(prefix: &str, data: &[u8]) -> String {
    let hash = hash_bytes(data);
    format!("{}_{:08X}", prefix, hash >> 32)
}
