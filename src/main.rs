use linear_collections::collections::CollectionError;
use linear_collections::collections::binary_tree::BstNode;
use linear_collections::collections::contiguous::{DynamicArray, FixedArray, FixedArray2D};
use linear_collections::collections::linked::{LinkedQueue, LinkedStack};

fn main() -> Result<(), CollectionError> {
    println!("\n[FixedArray]\n");

    let mut arr = FixedArray::try_filled(4, 0_u32)?;
    arr.try_set(2, 7)?;
    println!("{arr} {:?}", arr.try_get(4));

    let mut grid = FixedArray2D::try_from_fn(2, 3, |row, col| row * 3 + col)?;
    grid.try_set((1, 2), 10)?;
    println!("{grid}");

    println!("\n[DynamicArray]\n");

    let mut vec = DynamicArray::new();
    for i in 0..8_u8 {
        vec.append(i);
        println!("{vec:?}");
    }
    vec.try_insert(2, 100)?;
    let removed = vec.try_remove(&3)?;
    println!("Removed {removed}: {vec}");

    println!("\n[LinkedStack]\n");

    let mut stack = LinkedStack::new();
    for word in ["bottom", "middle", "top"] {
        stack.push(word);
    }
    println!("{stack:?}, peek: {}", stack.try_peek()?);
    println!("Popped {}, leaving {stack}", stack.try_pop()?);

    println!("\n[LinkedQueue]\n");

    let mut queue: LinkedQueue<_> = (1..=5).collect();
    println!("Removed {} from {queue}", queue.try_remove(2)?);
    let joined = &queue + &queue;
    println!("{joined:?}");
    while let Ok(item) = queue.try_pop() {
        print!("{item} ");
    }
    println!();

    println!("\n[BstNode]\n");

    let root = BstNode::with_children(2, Some(BstNode::new(1)), Some(BstNode::new(3)));
    println!("{root:?}, leaf: {}", root.is_leaf());

    if let Err(err) = queue.try_peek().map_err(CollectionError::from) {
        println!("\n{err} (empty: {})", err.is_empty_collection());
    }
    Ok(())
}
