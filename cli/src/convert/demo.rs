use radit::Converter;

use crate::error::Result;

const DEMO_OID: &str = "1.3.6.1.4.1.56521";

/// Convert the demonstration OID to its DN and back again
pub(crate) fn execute(converter: &Converter) -> Result<()> {
    let dn = converter.oid2dn(DEMO_OID);
    let oid = converter.dn2oid(&dn);

    println!("dn: {dn}");
    println!("oid: {oid}");

    Ok(())
}
