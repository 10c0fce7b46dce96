#![allow(dead_code)]

pub mod file;

pub const CLEAN_STATS: &str =
    "stats\tadded=0 copied=0 deleted=0 modified=0 renamed=0 unmerged=0 untracked=0\n";
