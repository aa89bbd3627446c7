use anyhow::Result;
use bumpalo::Bump;
use list::List;
use std::fmt::Display;

mod list;

/*
 * Values of the first three elements, joined with ", ".
 * Fails if the list is shorter than three elements.
 */
fn first_three<T: Display>(list: List<'_, T>) -> Result<String> {
    let values = [
        list.first()?,
        list.rest()?.first()?,
        list.rest()?.rest()?.first()?,
    ];
    Ok(values.map(|v| v.to_string()).join(", "))
}

fn main() -> Result<()> {
    let bump = Bump::new();
    let list = List::empty()
        .cons(&bump, "last")
        .cons(&bump, "middle")
        .cons(&bump, "first");

    println!("list:");
    println!("{}", list);
    println!();

    println!("first three:");
    println!("{}", first_three(list)?);
    println!();

    let mapped = list.map(&bump, |v| format!("{} mapped!", v));
    println!("mapped list:");
    println!("{}", mapped);
    println!();

    println!("first three mapped:");
    println!("{}", first_three(mapped)?);

    Ok(())
}
