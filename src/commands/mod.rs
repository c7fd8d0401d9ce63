pub mod authenticate;
pub mod create;
pub mod open;
pub mod split;
