use crate::areas::tree::Tree;
use crate::artifacts::config::RunConfig;
use std::cell::{RefCell, RefMut};
use std::path::PathBuf;

/// A single rsyncdiff run: the configuration, both trees and the output sink.
pub struct Comparison {
    config: RunConfig,
    from: Tree,
    to: Tree,
    writer: RefCell<Box<dyn std::io::Write>>,
}

impl Comparison {
    pub fn new(config: RunConfig, writer: Box<dyn std::io::Write>) -> Self {
        let from = Tree::new(PathBuf::from(&config.from));
        let to = Tree::new(PathBuf::from(&config.to));

        Comparison {
            config,
            from,
            to,
            writer: RefCell::new(writer),
        }
    }

    pub fn config(&self) -> &RunConfig {
        &self.config
    }

    pub fn from_tree(&self) -> &Tree {
        &self.from
    }

    pub fn to_tree(&self) -> &Tree {
        &self.to
    }

    pub fn writer(&'_ self) -> RefMut<'_, Box<dyn std::io::Write>> {
        self.writer.borrow_mut()
    }
}
