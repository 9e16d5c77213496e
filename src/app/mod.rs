// Application layer: turns evaluation outcomes into the lines the binary prints.

pub mod report;
