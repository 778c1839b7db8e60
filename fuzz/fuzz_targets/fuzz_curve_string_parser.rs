#![no_main]

use bezier_curve_editor::{CurveCoordinates, generate_curve_string};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(input) = std::str::from_utf8(data) else {
        return;
    };
    if let Ok(curve) = input.parse::<CurveCoordinates>() {
        // Jeder akzeptierte String muss sich erneut parsen lassen
        let printed = generate_curve_string(&curve);
        let reparsed: CurveCoordinates = printed
            .parse()
            .expect("generierter Kurven-String muss parsebar sein");
        assert_eq!(generate_curve_string(&reparsed), printed);
    }
});
