use validtime::{evaluate, Instant, Operand, Period};

fn main() {
    let incumbency: Period = "[2009-06-04 12:00:00+01:00,2009-06-05 12:00:00+01:00)"
        .parse()
        .expect("literal");
    println!("Canonical form: {incumbency}");
    println!("First instant:  {}", incumbency.first());
    println!("Last instant:   {}", incumbency.last());

    let ongoing = Period::from_start(Instant::parse("2009-06-05 11:00:00").expect("timestamp"));
    println!("Ongoing:        {ongoing}");
    println!("Still current:  {}", ongoing.is_current());

    for operator in ["before", "adjacent", "overlaps"] {
        let outcome = evaluate(operator, &incumbency, &Operand::Period(ongoing)).expect("operator");
        println!("{operator:>10}:     {outcome}");
    }
}
