use symexpr::prelude::*;

fn main() {
    let price = Expression::new("item.price");
    let qty = Expression::new("item.quantity");

    let total = (&price * &qty).round_to(2);
    let discounted = total.clone() - 0.1 * &total;
    let predicate = discounted.greater_equal(100) & qty.field("unit").equals("kg");

    println!("{predicate}");
    println!("{}", price.index(("EUR", 2024)));

    for name in ["neg", "rpow", "len"] {
        match price.apply_named(name, Operand::None) {
            Ok(e) => println!("{name}: {e}"),
            Err(err) => println!("{name}: {err}"),
        }
    }
}
