//! Catalog services — three media catalog APIs over one shared
//! concurrent in-memory store: SOAP-style movies, REST series, and
//! GraphQL anime.

pub mod graphql;
pub mod network;
pub mod rest;
pub mod soap;
pub mod storage;

#[cfg(test)]
mod tests {
    #[test]
    fn crate_loads() {
        // Empty body: if this test runs, the crate compiles and loads.
    }
}
