mod helpers;

mod form;
mod queries;
