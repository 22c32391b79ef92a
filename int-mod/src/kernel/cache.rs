use lazy_static::lazy_static;
use log::{debug, trace};

use std::collections::HashMap;
use std::sync::{Arc, OnceLock, PoisonError, RwLock};

use super::math::euler_phi;

lazy_static! {
    /// Memoized `euler_phi(modulus)`, one init-once cell per modulus.
    ///
    /// The map lock only guards cell insertion, so a poisoned lock is still readable.
    /// Entries are never evicted: every distinct modulus passed to an inverse
    /// (typed or through a runtime `Ring`) keeps one `i64` for the life of the process.
    static ref TOTIENT_CACHE: RwLock<HashMap<i64, Arc<OnceLock<i64>>>> =
        RwLock::new(HashMap::new());
}

fn cell_for(modulus: i64) -> Arc<OnceLock<i64>> {
    if let Some(cell) = TOTIENT_CACHE
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .get(&modulus)
    {
        return Arc::clone(cell);
    }

    let mut cache = TOTIENT_CACHE
        .write()
        .unwrap_or_else(PoisonError::into_inner);
    Arc::clone(cache.entry(modulus).or_default())
}

/// Returns `euler_phi(modulus)`, computing it at most once per modulus.
///
/// The factorization runs outside the map lock. Concurrent first lookups of the
/// same modulus wait on that modulus' cell only; other moduli are not blocked.
pub fn totient(modulus: i64) -> i64 {
    let cell = cell_for(modulus);
    if let Some(&phi) = cell.get() {
        trace!("totient cache hit: phi({modulus}) = {phi}");
        return phi;
    }

    *cell.get_or_init(|| {
        let phi = euler_phi(modulus);
        debug!("computed phi({modulus}) = {phi}");
        phi
    })
}
