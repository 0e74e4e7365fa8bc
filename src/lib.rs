#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

pub use pn_normalizer as normalizer;
pub use pn_reflect as reflect;
pub use pn_utils as utils;
