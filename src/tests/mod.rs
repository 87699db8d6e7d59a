
mod locator;
mod version;
