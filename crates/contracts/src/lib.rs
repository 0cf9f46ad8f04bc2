pub mod domain;
pub mod shared;

#[cfg(test)]
pub(crate) mod test_utils;
