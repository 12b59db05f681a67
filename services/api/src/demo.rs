use crate::infra::InMemoryConfirmationSink;
use chrono::{Local, NaiveDate};
use clap::Args;
use removals_core::autoquote::ItemCount;
use removals_core::bookings::{
    pricing, AddressDetails, BookingService, BookingSubmission, ContactDetails, CostBreakdown,
    DateDetails, FurnitureItem, InMemoryJobRepository, JobStatus, PackingMaterial, PricingInput,
    QuoteRecommendationRequest,
};
use removals_core::business::BusinessDirectory;
use removals_core::error::AppError;
use std::sync::Arc;

#[derive(Args, Debug)]
pub(crate) struct QuoteArgs {
    /// Home size bracket (studio, 1-bedroom, 2-bedrooms, 3-bedrooms, 4-bedrooms)
    #[arg(long)]
    pub(crate) home_size: String,
    /// Furniture line as item-id=quantity; repeat per line
    #[arg(long = "item", value_parser = parse_counted_line)]
    pub(crate) items: Vec<CountedLine>,
    /// Furniture line from the initial estimate, for delta pricing
    #[arg(long = "initial-item", value_parser = parse_counted_line)]
    pub(crate) initial_items: Vec<CountedLine>,
    /// Packing service ("all-inclusive" activates the flat package)
    #[arg(long, default_value = "self-pack")]
    pub(crate) packing: String,
    /// Packing material as material-id=quantity; repeat per line
    #[arg(long = "material", value_parser = parse_counted_line)]
    pub(crate) materials: Vec<CountedLine>,
    /// Include furniture dismantling and reassembly
    #[arg(long)]
    pub(crate) dismantle: bool,
    /// Collection floor (free text; the leading digits are priced)
    #[arg(long, default_value = "0")]
    pub(crate) floor: String,
    /// Collection address has no lift
    #[arg(long)]
    pub(crate) no_lift: bool,
    /// Print the breakdown as JSON instead of text
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Business reference for the walkthrough booking
    #[arg(long, default_value = "DEMO")]
    pub(crate) business_ref: String,
    /// Collection date (YYYY-MM-DD). Defaults to ten days out.
    #[arg(long, value_parser = crate::infra::parse_date)]
    pub(crate) collection_date: Option<NaiveDate>,
    /// Skip the auto-quote portion of the walkthrough
    #[arg(long)]
    pub(crate) skip_recommendation: bool,
}

/// One "id=quantity" pair taken from the command line.
#[derive(Clone, Debug)]
pub(crate) struct CountedLine {
    pub(crate) id: String,
    pub(crate) quantity: i64,
}

fn parse_counted_line(raw: &str) -> Result<CountedLine, String> {
    let (id, quantity) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected id=quantity, got '{raw}'"))?;
    let id = id.trim();
    if id.is_empty() {
        return Err(format!("expected id=quantity, got '{raw}'"));
    }
    let quantity = quantity
        .trim()
        .parse::<i64>()
        .map_err(|err| format!("failed to parse quantity in '{raw}' ({err})"))?;
    Ok(CountedLine {
        id: id.to_string(),
        quantity,
    })
}

pub(crate) fn run_quote(args: QuoteArgs) -> Result<(), AppError> {
    let QuoteArgs {
        home_size,
        items,
        initial_items,
        packing,
        materials,
        dismantle,
        floor,
        no_lift,
        json,
    } = args;

    let input = PricingInput {
        home_size,
        furniture_items: items.into_iter().map(furniture_line).collect(),
        initial_furniture_items: initial_items.into_iter().map(furniture_line).collect(),
        packing_service: packing,
        packing_materials: materials.into_iter().map(material_line).collect(),
        dismantle_package: dismantle,
        collection_address: collection_for(floor, no_lift),
        delivery_address: None,
    };

    let breakdown = pricing::quote(&input);

    if json {
        match serde_json::to_string_pretty(&breakdown) {
            Ok(payload) => println!("{payload}"),
            Err(err) => println!("Breakdown unavailable: {err}"),
        }
        return Ok(());
    }

    println!("Quote for a {} move", input.home_size);
    render_breakdown(&breakdown);
    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs {
        business_ref,
        collection_date,
        skip_recommendation,
    } = args;

    let collection_date =
        collection_date.unwrap_or_else(|| Local::now().date_naive() + chrono::Duration::days(10));
    let materials_delivery_date = collection_date - chrono::Duration::days(4);

    println!("Removals booking demo");

    let directory = Arc::new(BusinessDirectory::standard());
    let repository = Arc::new(InMemoryJobRepository::default());
    let sink = Arc::new(InMemoryConfirmationSink::default());
    let service = BookingService::new(directory.clone(), repository, sink.clone());

    let Some(business) = directory.lookup(&business_ref) else {
        println!(
            "Unknown business reference '{business_ref}'; known references: {}",
            directory.references().join(", ")
        );
        return Ok(());
    };
    println!(
        "Tenant: {} (primary colour {})",
        business.business_ref, business.theme.primary
    );

    let submission = demo_booking_submission(
        &business.business_ref,
        collection_date,
        materials_delivery_date,
    );
    let job_id = match service.submit(submission) {
        Ok(job_id) => job_id,
        Err(err) => {
            println!("Submission rejected: {err}");
            return Ok(());
        }
    };

    let record = match service.job(&job_id) {
        Ok(record) => record,
        Err(err) => {
            println!("Stored job unavailable: {err}");
            return Ok(());
        }
    };

    println!("\nBooking stored");
    println!(
        "- Reference: {} (status {})",
        record.display_reference(),
        record.status.label()
    );
    println!(
        "- Customer: {} <{}>",
        record.customer_name(),
        record.contact.email
    );
    if let (Some(address), Some(slot)) = (&record.collection_address, &record.collection_date) {
        println!(
            "- Collection: {} on {} between {}",
            address.address, slot.date, slot.time_slot
        );
    }
    println!("- Created: {}", record.created_at.format("%Y-%m-%d %H:%M"));
    render_breakdown(&record.cost_breakdown);

    println!("\nReview walkthrough");
    for status in JobStatus::ordered().into_iter().skip(1) {
        if let Err(err) = service.set_status(&job_id, status) {
            println!("Status update failed: {err}");
            return Ok(());
        }
        println!("- Status -> {}", status.label());
    }
    if let Err(err) = service.set_notes(&job_id, "Walkthrough booking; crew debrief complete") {
        println!("Notes update failed: {err}");
        return Ok(());
    }
    println!("- Notes recorded");

    let jobs = match service.jobs() {
        Ok(jobs) => jobs,
        Err(err) => {
            println!("Job list unavailable: {err}");
            return Ok(());
        }
    };
    println!("\nJob list ({} stored)", jobs.len());
    for job in &jobs {
        println!(
            "- {} | {} | {} | £{}",
            job.display_reference(),
            job.business_ref,
            job.status.label(),
            job.cost_breakdown.total
        );
    }

    match service.job(&job_id) {
        Ok(updated) => match serde_json::to_string_pretty(&updated) {
            Ok(json) => println!("\nStored record payload:\n{json}"),
            Err(err) => println!("Stored record payload unavailable: {err}"),
        },
        Err(err) => println!("Stored job unavailable: {err}"),
    }

    let all_inclusive = PricingInput {
        home_size: record.home_size.clone(),
        furniture_items: record.furniture_items.clone(),
        initial_furniture_items: record.initial_furniture_items.clone(),
        packing_service: "all-inclusive".to_string(),
        packing_materials: record.packing_materials.clone(),
        dismantle_package: record.dismantle_package,
        collection_address: record.collection_address.clone(),
        delivery_address: record.delivery_address.clone(),
    };
    println!("\nAll-inclusive preview for the same move (nothing stored)");
    render_breakdown(&service.quote(&all_inclusive));

    let confirmations = sink.confirmations();
    if confirmations.is_empty() {
        println!("\nConfirmation messages: none dispatched");
    } else {
        println!("\nConfirmation messages");
        for confirmation in confirmations {
            println!(
                "- {} -> {} <{}>",
                confirmation.display_reference,
                confirmation.customer_name,
                confirmation.customer_email
            );
        }
    }

    if skip_recommendation {
        return Ok(());
    }

    println!("\nVehicle recommendation");
    let request = QuoteRecommendationRequest {
        business_ref: record.business_ref.clone(),
        home_size: record.home_size.clone(),
        furniture_items: record
            .furniture_items
            .iter()
            .map(|item| ItemCount {
                item_id: item.item_id.clone(),
                quantity: item.quantity,
            })
            .collect(),
        distance_miles: 3.6,
        driving_minutes: 24.0,
        no_parking: false,
        no_lift: true,
        customer_assistance: false,
        difficult_access: false,
    };
    match service.recommendation(&request) {
        Ok(quote) => {
            println!(
                "- Vehicle: {} with a crew of {}",
                quote.vehicle_type.label(),
                quote.crew_size
            );
            println!("- Reasoning: {}", quote.reasoning);
            println!(
                "- Time: {:.1}h total ({} m³ across {} heavy items)",
                quote.time_estimate.total_hours, quote.total_volume, quote.num_heavy_items
            );
            for note in &quote.time_estimate.notes {
                println!("  - {note}");
            }
            println!("- Price: £{:.2}", quote.pricing.total_cost);
            for note in &quote.pricing.pricing_notes {
                println!("  - {note}");
            }
        }
        Err(err) => println!("Recommendation unavailable: {err}"),
    }

    Ok(())
}

fn furniture_line(line: CountedLine) -> FurnitureItem {
    FurnitureItem {
        item_id: line.id.clone(),
        name: line.id,
        quantity: line.quantity,
        category: None,
    }
}

fn material_line(line: CountedLine) -> PackingMaterial {
    PackingMaterial {
        material_id: line.id.clone(),
        name: line.id,
        quantity: line.quantity,
    }
}

fn collection_for(floor: String, no_lift: bool) -> Option<AddressDetails> {
    if floor == "0" && !no_lift {
        return None;
    }
    Some(AddressDetails {
        postcode: String::new(),
        address: String::new(),
        floor,
        has_parking: true,
        has_lift: !no_lift,
    })
}

fn demo_booking_submission(
    business_ref: &str,
    collection_date: NaiveDate,
    materials_delivery_date: NaiveDate,
) -> BookingSubmission {
    let initial_furniture = vec![
        FurnitureItem {
            item_id: "sofa-3seat".to_string(),
            name: "Three-Seater Sofa".to_string(),
            quantity: 1,
            category: Some("Living".to_string()),
        },
        FurnitureItem {
            item_id: "dining-chair".to_string(),
            name: "Dining Chair".to_string(),
            quantity: 4,
            category: Some("Dining".to_string()),
        },
    ];
    let mut furniture = initial_furniture.clone();
    furniture.extend([
        FurnitureItem {
            item_id: "wardrobe-double".to_string(),
            name: "Double Wardrobe".to_string(),
            quantity: 1,
            category: Some("Bedrooms".to_string()),
        },
        FurnitureItem {
            item_id: "bed-double".to_string(),
            name: "Double Bed Frame".to_string(),
            quantity: 1,
            category: Some("Bedrooms".to_string()),
        },
        FurnitureItem {
            item_id: "washing-machine".to_string(),
            name: "Washing Machine".to_string(),
            quantity: 1,
            category: Some("Kitchen".to_string()),
        },
    ]);

    BookingSubmission {
        business_ref: business_ref.to_string(),
        home_size: "2-bedrooms".to_string(),
        furniture_items: furniture,
        initial_furniture_items: initial_furniture,
        packing_service: "self-pack".to_string(),
        packing_materials: vec![
            PackingMaterial {
                material_id: "small-boxes".to_string(),
                name: "Small Boxes".to_string(),
                quantity: 8,
            },
            PackingMaterial {
                material_id: "tape".to_string(),
                name: "Packing Tape".to_string(),
                quantity: 2,
            },
        ],
        dismantle_package: true,
        collection_address: Some(AddressDetails {
            postcode: "KT2 6HW".to_string(),
            address: "27 Cromwell Gardens, Kingston upon Thames".to_string(),
            floor: "1".to_string(),
            has_parking: true,
            has_lift: false,
        }),
        delivery_address: Some(AddressDetails {
            postcode: "KT6 4PD".to_string(),
            address: "5 Priory Close, Surbiton".to_string(),
            floor: "0".to_string(),
            has_parking: true,
            has_lift: true,
        }),
        collection_date: Some(DateDetails {
            date: collection_date.to_string(),
            time_slot: "9:00 - 15:00".to_string(),
            interval_type: Some("6hours".to_string()),
        }),
        materials_delivery_date: Some(DateDetails {
            date: materials_delivery_date.to_string(),
            time_slot: "9:00 - 15:00".to_string(),
            interval_type: Some("6hours".to_string()),
        }),
        contact: ContactDetails {
            first_name: "Marcus".to_string(),
            last_name: "Webb".to_string(),
            email: "marcus.webb@example.com".to_string(),
            country_code: "+44".to_string(),
            phone: "07700 900321".to_string(),
            has_promo_code: false,
            promo_code: String::new(),
            sign_up_for_news: false,
            agree_to_terms: true,
        },
    }
}

fn render_breakdown(breakdown: &CostBreakdown) {
    println!("- Base price:         £{}", breakdown.base_price);
    println!("- Furniture charge:   £{}", breakdown.furniture_charge);
    println!("- Packing materials:  £{}", breakdown.packing_materials_charge);
    println!("- Distance surcharge: £{}", breakdown.distance_surcharge);
    println!("- Floor surcharge:    £{}", breakdown.floor_surcharge);
    println!("Total: £{}", breakdown.total);
}
