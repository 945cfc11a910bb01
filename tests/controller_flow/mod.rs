mod drawing;
mod editing;
mod history;
mod support;
mod view;
