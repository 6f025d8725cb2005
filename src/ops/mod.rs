mod arithmetic;
mod ordering;
mod statistics;
