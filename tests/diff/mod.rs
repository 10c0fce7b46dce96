mod fail_for_path_without_unstaged_changes;
mod show_diff_for_path_with_spaces;
mod show_diff_for_selected_files;
