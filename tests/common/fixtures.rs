//! JSON record builders shared across the document tests.

use serde_json::{Value, json};

pub fn speeds_record() -> Value {
    json!({
        "aircraftModel": "Cessna 172S",
        "footer": "N12345 | KPAO",
        "speeds": [
            { "label": "V_NO", "value": "129" },
            { "label": "V_NE", "value": "163" },
            { "label": "Best Glide", "value": "68" }
        ],
        "takeoff": [
            { "label": "Rotate", "value": "55" },
            { "label": "V_X", "value": "62" }
        ],
        "landing": [
            { "label": "Final", "value": "65" }
        ],
        "emergency": [
            { "label": "Engine out", "value": "68" }
        ],
        "briefing": [
            {
                "type": "EMERGENCY",
                "title": "Runway loss before rotation",
                "content": "Throttle idle, land **straight ahead**."
            },
            {
                "title": "Engine failure after takeoff",
                "content": "Below 700 ft AGL land within ~30 degrees of the nose."
            }
        ]
    })
}

pub fn emergency_record() -> Value {
    json!({
        "aircraft": "C172S",
        "tailNumber": "N12345",
        "makeModel": "Cessna 172S",
        "footer": "POH Section 3 governs",
        "sections": [
            {
                "type": "EMERGENCY",
                "title": "ENGINE FAILURE",
                "scripts": [
                    {
                        "internalCode": "EMERGENCY 3-5",
                        "steps": [
                            { "type": "ITEM", "item": { "type": "CHECK_LINE", "title": "Airspeed", "desiredState": "68 KIAS", "isHighlighted": true } },
                            { "type": "ITEM", "item": { "type": "CHECK_LINE", "title": "Fuel selector", "desiredState": "BOTH" } },
                            { "type": "ITEM", "item": { "type": "CONDITION", "title": "If restart fails" } },
                            { "type": "ITEM", "item": { "type": "CHECK_LINE", "title": "Mixture", "desiredState": "IDLE CUTOFF" } }
                        ]
                    }
                ]
            },
            {
                "type": "ABNORMAL",
                "title": "ELECTRICAL MALFUNCTIONS",
                "scripts": [
                    {
                        "title": "ALTERNATOR",
                        "steps": [
                            { "type": "ITEM", "item": { "type": "CHECK_LINE", "title": "Master switch", "desiredState": "CYCLE" } },
                            { "type": "GROUP", "group": { "isHighlighted": true, "items": [
                                { "type": "CHECK_LINE", "title": "Nonessential load", "desiredState": "OFF" }
                            ] } }
                        ]
                    },
                    {
                        "title": "BATTERY",
                        "steps": [
                            { "type": "ITEM", "item": { "type": "CHECK_LINE", "title": "Ammeter", "desiredState": "CHECK" } },
                            { "type": "ITEM", "item": { "type": "INFO", "title": "Note", "content": "Expect loss of avionics within 30 minutes." } }
                        ]
                    }
                ]
            }
        ]
    })
}

pub fn endorsement_record() -> Value {
    json!({
        "cfiName": "A. Instructor",
        "cfiNumber": "1234567CFI",
        "expirationDate": "10/2027",
        "endorsementTitle": "Flight review: FAR 61.56(a) and (c)",
        "endorsementText": "I certify that [name], holder of pilot certificate No. [number], \
has satisfactorily completed a flight review of section 61.56(a) on [date]. The review \
consisted of the ground and flight training required by that section, including a review \
of the current general operating and flight rules of part 91 and those maneuvers and \
procedures that, at the discretion of the person giving the review, are necessary for the \
pilot to demonstrate the safe exercise of the privileges of the pilot certificate. No \
further endorsement is required and this record satisfies the currency requirement in full.",
        "endorsementType": "template",
        "fieldValues": {
            "name": "Jordan Pilot",
            "number": "7654321",
            "date": "8/29/2026"
        }
    })
}

pub fn weight_balance_record() -> Value {
    json!({
        "aircraft": "C172S",
        "tailNumber": "N12345",
        "makeModel": "Cessna 172S",
        "date": "8/29/2026",
        "category": "Normal",
        "maxTakeoffWeight": "2550",
        "referenceDatum": "Firewall face",
        "positions": [
            { "name": "Basic empty weight, long station name", "weight": "1200", "arm": "39.0", "moment": "46800" },
            { "name": "Front seats", "weight": "800", "arm": "41.5", "moment": "33200" }
        ],
        "footer": "N12345 | C172S"
    })
}

pub fn flight_plan_record() -> Value {
    json!({
        "departure": {
            "code": "KPAO",
            "elevation": "4",
            "towerFreq": "118.6",
            "groundFreq": "125.0"
        },
        "arrival": {
            "code": "KMRY",
            "elevation": "257",
            "wxFreq": "119.25"
        },
        "climb": {
            "cruiseAlt": "5500",
            "fieldElev": "4",
            "climbFpm": "700",
            "climbGph": "11"
        },
        "cruise": {
            "powerPercent": "65",
            "rpm": "2400",
            "gph": "8.5",
            "tas": "115"
        },
        "descent": {
            "descentRate": "500"
        },
        "legs": [
            {
                "name": "SLAC",
                "vorFreq": "116.0",
                "altitude": "5500",
                "windDirection": "270",
                "windVelocity": "15",
                "temperature": "12",
                "tas": "115",
                "trueCourse": "152",
                "magneticHeading": "139",
                "heading": "145",
                "groundSpeed": "108",
                "distance": "24",
                "ete": "13"
            },
            { "name": "KMRY" }
        ],
        "footer": "KPAO - KMRY | 8/29/2026"
    })
}
