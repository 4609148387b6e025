use rankset::{DeleteRequest, Leaderboard, LeaderboardConfig, MemoryStore, Order, SortedSetStore};

fn main() {
    let config = LeaderboardConfig::new("combat").with_capacity(5);
    let board = Leaderboard::open(MemoryStore::new(), config).unwrap();

    let players = (0..10)
        .map(|i| (format!("Player#{}", i + 1), rand::random::<u32>() as f64 % 10000.0 / 100.0))
        .collect::<Vec<_>>();
    board.submit_many(&players).unwrap();
    board.submit("Alice", 99.5).unwrap();

    for (i, entry) in board.top().unwrap().iter().enumerate() {
        println!("{}. {} {:.2}", i + 1, entry.key, entry.score);
    }

    let reverse = std::env::args().any(|arg| arg == "--rev");
    let name = &board.config().set_name;
    let others = board
        .store()
        .range_with_scores(name, 0, 2, Order::from_reverse(reverse))
        .unwrap();
    for entry in others {
        println!("{}", entry);
    }

    board.delete(DeleteRequest::Player("Alice".to_string())).unwrap();
    assert!(board.delete(DeleteRequest::Ambiguous).is_err());
    board.delete(DeleteRequest::ClearAll).unwrap();
    assert_eq!(board.len().unwrap(), 0);
}
