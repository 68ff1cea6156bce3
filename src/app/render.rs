use crate::domain::model::{Advocate, CitiesResponse, Page};
use crate::domain::ports::PhoneFormatter;
use crate::utils::error::Result;
use std::io::Write;

pub fn write_page_json<W: Write>(writer: W, page: &Page<Advocate>) -> Result<()> {
    serde_json::to_writer_pretty(writer, page)?;
    Ok(())
}

pub fn write_cities_json<W: Write>(writer: W, cities: &CitiesResponse) -> Result<()> {
    serde_json::to_writer_pretty(writer, cities)?;
    Ok(())
}

/// One CSV row per advocate on the page. Pagination metadata is not part of the output.
pub fn write_page_csv<W: Write>(
    writer: W,
    page: &Page<Advocate>,
    phones: &dyn PhoneFormatter,
) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record([
        "firstName",
        "lastName",
        "city",
        "degree",
        "specialties",
        "yearsOfExperience",
        "phoneNumber",
        "phoneE164",
    ])?;

    for advocate in &page.data {
        let raw_phone = advocate.phone_number.to_string();
        csv_writer.write_record([
            advocate.first_name.as_str(),
            advocate.last_name.as_str(),
            advocate.city.as_str(),
            advocate.degree.as_str(),
            advocate.specialties.join("; ").as_str(),
            advocate.years_of_experience.to_string().as_str(),
            phones.format(&raw_phone).as_str(),
            phones.to_e164(&raw_phone).unwrap_or_default().as_str(),
        ])?;
    }

    csv_writer.flush()?;
    Ok(())
}

pub fn write_cities_csv<W: Write>(writer: W, cities: &CitiesResponse) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(["city"])?;
    for city in &cities.cities {
        csv_writer.write_record([city])?;
    }
    csv_writer.flush()?;
    Ok(())
}
