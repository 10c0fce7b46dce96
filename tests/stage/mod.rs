mod fail_to_unstage_unstaged_path;
mod remove_modified_file_only_with_force;
mod stage_working_tree_changes;
mod unstage_staged_rename;
