#[cfg(test)]
mod tests {
    use engine::window::Window;

    #[test]
    fn test_no_work_when_caught_up() {
        assert_eq!(Window::plan(100, 100, 10000), None);
        assert_eq!(Window::plan(100, 99, 10000), None);
    }

    #[test]
    fn test_window_clamped_by_max_window() {
        let window = Window::plan(100, 50100, 10000).unwrap();
        assert_eq!(window, Window { from: 101, to: 10100 });

        // next cycle picks up where the previous one checkpointed
        let window = Window::plan(10100, 50100, 10000).unwrap();
        assert_eq!(window, Window { from: 10101, to: 20100 });
    }

    #[test]
    fn test_window_clamped_by_chain_head() {
        let window = Window::plan(100, 150, 10000).unwrap();
        assert_eq!(window, Window { from: 101, to: 150 });
    }

    #[test]
    fn test_single_block_window() {
        let window = Window::plan(100, 101, 10000).unwrap();
        assert_eq!(window, Window { from: 101, to: 101 });
        assert_eq!(window.span(), 0);
    }

    #[test]
    fn test_span_is_block_distance() {
        let window = Window::plan(100, 50100, 10000).unwrap();
        assert_eq!(window.span(), 9999);
    }
}
