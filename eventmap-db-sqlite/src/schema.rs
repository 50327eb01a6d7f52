///////////////////////////////////////////////////////////////////////
// Locations
///////////////////////////////////////////////////////////////////////

table! {
    location (rowid) {
        rowid -> BigInt,
        id -> Text,
        street -> Nullable<Text>,
        city -> Text,
        country -> Text,
        place_id -> Nullable<Text>,
        formatted_address -> Nullable<Text>,
        // micro degrees
        lat -> Nullable<Integer>,
        // micro degrees
        lng -> Nullable<Integer>,
    }
}
