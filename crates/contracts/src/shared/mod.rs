pub mod menu_tree;
