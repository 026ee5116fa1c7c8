use parse_mystery::parse_line;

fn main() {
    let lines = [
        "1",
        "12$",
        "123^",
        "12$34^",
        "123^$123$^",
        "800!)176^b006$(46$*#63Z*16$*06$z5^",
    ];

    for line in lines {
        println!("{line:<40} -> {:?}", parse_line(line));
    }
}
