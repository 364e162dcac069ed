pub mod dom;
pub mod icons;

#[cfg(test)]
pub mod fake_document;
