// 統合テストのエントリーポイント

mod test_end_to_end;
mod test_factories;
mod test_shared_instance;
