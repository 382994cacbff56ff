mod checks;
mod helpers;
mod quit;
