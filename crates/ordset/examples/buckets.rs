//! Plain set, two buckets over one set, and a cursor walk.
//!
//! Run with: `cargo run -p ordset --example buckets`

use ordset::OrdSet;

fn main() {
    unbucketed();
    buckets();
    cursor();
}

fn unbucketed() {
    let set = OrdSet::new();
    set.put("a");
    set.put("b");
    println!("{:?}", set.keys());
    // ["b", "a"]
}

fn buckets() {
    let set = OrdSet::new();
    let users = set.bucket("user");
    users.put("rob");
    users.put("bob");
    users.put("pike");
    users.put("alice");
    println!("{:?}", users.keys());
    // ["rob", "pike", "bob", "alice"]

    let items = set.bucket("item");
    items.put("003");
    items.put("042");
    println!("{:?}", items.keys());
    // ["042", "003"]
}

fn cursor() {
    println!("Cursor");
    let set = OrdSet::new();
    let users = set.bucket("user");
    for name in ["rob", "bob", "pike", "alice", "anna"] {
        users.put(name);
    }
    set.bucket("item").put("003");

    let mut c = users.cursor();
    let mut k = c.last();
    while let Some(key) = k {
        print!("[{}] ", key);
        k = c.prev();
    }
    println!();
    // [rob] [pike] [bob] [anna] [alice]

    let mut items = set.bucket("item").cursor();
    for key in items.iter() {
        print!("[{}] ", key);
    }
    println!();
    // [003]
}
