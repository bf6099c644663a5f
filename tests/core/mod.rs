// tests/core/mod.rs

#[cfg(test)]
mod key;
#[cfg(test)]
mod report;
#[cfg(test)]
mod session;
