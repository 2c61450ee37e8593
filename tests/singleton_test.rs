use payment_patterns::application::singleton::Singleton;

#[test]
fn test_instance_is_shared_across_threads() {
    let main_instance = Singleton::get_instance() as *const Singleton as usize;

    let other_instance = std::thread::spawn(|| Singleton::get_instance() as *const Singleton as usize)
        .join()
        .unwrap();

    assert_eq!(main_instance, other_instance);
}

#[test]
fn test_later_calls_do_not_recreate_instance() {
    let created_at = Singleton::get_instance().created_at();
    std::thread::sleep(std::time::Duration::from_millis(5));

    assert_eq!(Singleton::get_instance().created_at(), created_at);
}
